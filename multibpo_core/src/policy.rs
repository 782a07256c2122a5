/// One collapsible block of legal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable handle used to track which section is open.
    pub id: &'static str,

    /// Heading shown on the collapsed row.
    pub title: &'static str,

    /// Full text revealed when the section is open.
    pub body: &'static str,
}

/// Header block shown above the accordions.
pub const RESPONSIBLE: &str =
    "MULTI BPO DO BRASIL | CNPJ 46.505.712/0001-63 | privacidade@multibpo.com.br";

/// When the legal text was last touched.
pub const LAST_UPDATED: &str = "02 de junho de 2025";

/// The privacy-policy sections, in display order.
pub const PRIVACY: &[Section] = &[
    Section {
        id: "compromisso",
        title: "1. Compromisso com a sua Privacidade",
        body: "A MULTI BPO DO BRASIL LTDA se compromete com a transparência, \
               privacidade e segurança dos dados pessoais de seus usuários, \
               clientes, parceiros, colaboradores, prestadores de serviços e \
               visitantes. Esta Política explica como coletamos, usamos, \
               compartilhamos e protegemos seus dados pessoais.",
    },
    Section {
        id: "dados",
        title: "2. Quais dados coletamos",
        body: "a) Dados fornecidos diretamente: nome completo, e-mail, número \
               de telefone (incluindo WhatsApp), dados de voz, documentos e \
               arquivos enviados, informações de formulários de contato e \
               cadastro.\n\
               b) Dados coletados automaticamente: endereço IP, tipo de \
               navegador e dispositivo, sistema operacional, páginas acessadas \
               e tempo de navegação, cookies e identificadores de sessão.",
    },
    Section {
        id: "finalidades",
        title: "3. Finalidades do tratamento",
        body: "Prestar atendimento via WhatsApp e canais digitais; operar \
               assistentes virtuais com inteligência artificial (IA); enviar \
               comunicações sobre produtos, serviços e promoções; analisar \
               comportamento de navegação e melhorar a experiência; cumprir \
               obrigações legais, contratuais e regulatórias; prevenir fraudes \
               e garantir a segurança das operações; execução dos serviços \
               contratados, incluindo automações e IA.",
    },
    Section {
        id: "direitos",
        title: "4. Seus direitos",
        body: "Você pode, a qualquer momento, solicitar: confirmação da \
               existência de tratamento; acesso aos dados pessoais; correção \
               de dados incompletos, inexatos ou desatualizados; anonimização, \
               bloqueio ou eliminação de dados desnecessários; portabilidade \
               dos dados; eliminação dos dados tratados com base no \
               consentimento; informação sobre o compartilhamento de dados; \
               revogação do consentimento. Solicitações: \
               privacidade@multibpo.com.br.",
    },
];

/// The terms-of-use sections, in display order.
pub const TERMS: &[Section] = &[
    Section {
        id: "objeto",
        title: "1. Objeto e âmbito de aplicação",
        body: "A MULTI BPO disponibiliza soluções tecnológicas baseadas em \
               inteligência artificial, automação de processos, assistentes \
               virtuais, sistemas de atendimento e ferramentas de gestão. Os \
               serviços podem incluir: plataformas online, APIs, sistemas \
               integrados, totens de atendimento, cursos, consultorias e \
               outras ferramentas digitais.",
    },
    Section {
        id: "licenca",
        title: "2. Licença de uso das soluções",
        body: "A MULTI BPO concede uma licença de uso pessoal, exclusiva, \
               intransferível e revogável. É vedado: copiar, modificar, \
               distribuir ou realizar engenharia reversa; utilizar para fins \
               ilícitos, fraudulentos ou abusivos; ceder ou sublicenciar os \
               serviços a terceiros sem autorização.",
    },
    Section {
        id: "limitacao",
        title: "3. Limitação de responsabilidade",
        body: "As soluções são disponibilizadas \"tal como estão\". A empresa \
               não se responsabiliza por: problemas decorrentes de conexão com \
               a internet; decisões tomadas com base em informações geradas \
               por IA; falhas de terceiros integrados à solução; eventuais \
               erros, imprecisões ou respostas incoerentes da IA; uso \
               inadequado ou interpretação equivocada das informações.",
    },
    Section {
        id: "foro",
        title: "4. Lei aplicável e foro",
        body: "Este documento é regido pelas leis da República Federativa do \
               Brasil, em conformidade com a Lei Geral de Proteção de Dados \
               Pessoais – LGPD (Lei nº 13.709/2018). Fica eleito o foro da \
               Comarca de Barueri/SP, com renúncia expressa a qualquer outro, \
               por mais privilegiado que seja.",
    },
];

/// Every section, privacy first, the way the page lists them.
#[must_use]
pub fn sections() -> Vec<Section> {
    PRIVACY.iter().chain(TERMS.iter()).copied().collect()
}

/// Expand/collapse state over a list of sections: at most one open at a time,
/// and re-selecting the open one closes it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accordion {
    /// Id of the currently open section.
    expanded: Option<&'static str>,
}

impl Accordion {
    /// Open the given section, closing whichever was open. Toggling the open
    /// section closes it instead.
    pub fn toggle(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Whether the given section is the open one.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nothing_is_expanded_initially() {
        let accordion = Accordion::default();

        assert!(sections().iter().all(|s| !accordion.is_expanded(s.id)));
    }

    #[test]
    fn toggling_opens_and_retoggling_closes() {
        let mut accordion = Accordion::default();

        accordion.toggle("dados");
        assert!(accordion.is_expanded("dados"));

        accordion.toggle("dados");
        assert!(!accordion.is_expanded("dados"));
    }

    #[test]
    fn at_most_one_section_is_open() {
        let mut accordion = Accordion::default();

        accordion.toggle("dados");
        accordion.toggle("licenca");

        assert!(!accordion.is_expanded("dados"));
        assert!(accordion.is_expanded("licenca"));
        assert_eq!(
            sections()
                .iter()
                .filter(|s| accordion.is_expanded(s.id))
                .count(),
            1
        );
    }

    #[test]
    fn section_ids_are_unique() {
        let all = sections();

        for (i, section) in all.iter().enumerate() {
            assert!(
                all.iter().skip(i + 1).all(|other| other.id != section.id),
                "duplicate id {}",
                section.id
            );
        }
    }
}
