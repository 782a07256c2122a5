/// Create an enum of form fields that can be cycled with tab/shift-tab, each
/// carrying the label to draw on its border.
#[macro_export]
macro_rules! form_fields {
    ($name:ident, $($variant:ident => $label:literal),* $(,)?) => {
        /// Which field of the form is active.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant
            ),*
        }

        impl $name {
            /// Every field, in tab order.
            const FIELDS: &'static [$name] = &[
                $($name::$variant),*
            ];

            /// Position in the tab order.
            fn index(&self) -> usize {
                match self {
                    $(Self::$variant => $name::$variant as usize),*
                }
            }

            /// The title to draw on the field's border.
            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            /// Rotate through the options (e.g. with tab)
            fn next(&self) -> Self {
                Self::FIELDS[(self.index() + 1) % Self::FIELDS.len()]
            }

            /// Rotate through the options in reverse (e.g. with shift-tab)
            fn prev(&self) -> Self {
                Self::FIELDS[(self.index() + Self::FIELDS.len() - 1) % Self::FIELDS.len()]
            }
        }
    };
}
