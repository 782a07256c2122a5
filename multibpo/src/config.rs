use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The MultiBPO signup funnel on the terminal, driven by WhatsApp deep links
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Backend to talk to. Should only be the protocol and domain.
    #[clap(long, default_value = "https://multibpo.com.br")]
    pub server: String,

    /// Where should we store the session and logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,

    /// Which screen the deep link points at. Without one we open the landing
    /// screen.
    #[clap(subcommand)]
    pub route: Option<Route>,
}

/// Screens reachable from a deep link. The flags mirror the query parameters
/// the links carry.
#[derive(Debug, Subcommand)]
pub enum Route {
    /// The registration form
    Cadastro {
        /// Phone number carried over from WhatsApp, pre-filled into the form
        #[clap(long)]
        phone: Option<String>,
    },

    /// "Check your inbox", shown right after registering
    VerificarEmail {
        /// Email the verification message went to
        #[clap(long)]
        email: Option<String>,
    },

    /// Follow the verification link from the email
    ValidarEmail {
        /// The one-time token from the link
        token: String,
    },

    /// Post-verification confirmation; nothing is re-checked
    Sucesso,

    /// The subscription pitch and checkout
    Premium {
        /// Phone number carried over from WhatsApp
        #[clap(long)]
        phone: Option<String>,

        /// Where the visitor came from (e.g. `whatsapp`)
        #[clap(long = "ref")]
        origin: Option<String>,
    },

    /// Confirmation screen the checkout redirects back to
    PremiumSucesso {
        /// Subscription id echoed by the payment provider
        #[clap(long)]
        subscription_id: Option<String>,

        /// Phone number the subscription belongs to
        #[clap(long)]
        phone: Option<String>,

        /// Where the visitor came from (e.g. `whatsapp`)
        #[clap(long = "ref")]
        origin: Option<String>,
    },

    /// Privacy policy and terms of use
    Politica,
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("br", "multibpo", "multibpo")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
