use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BuiltinOverwriteAction {
    Deny,
    Warn,
    Allow,
}

impl From<BuiltinOverwriteAction> for md_model::BuiltinOverwriteAction {
    fn from(action: BuiltinOverwriteAction) -> Self {
        match action {
            BuiltinOverwriteAction::Deny => Self::Deny,
            BuiltinOverwriteAction::Warn => Self::Warn,
            BuiltinOverwriteAction::Allow => Self::Allow,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum RegisterBuiltins {
    Yes,
    No,
}

impl From<RegisterBuiltins> for md_model::RegisterBuiltins {
    fn from(register: RegisterBuiltins) -> Self {
        match register {
            RegisterBuiltins::Yes => Self::Yes,
            RegisterBuiltins::No => Self::No,
        }
    }
}

/// Builds the ISO 19139 type catalogs and prints what they contain.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Only list this namespace, given by prefix (e.g. `gmd`) or URI
    #[arg(long)]
    pub namespace: Option<String>,

    /// Describe a single type, e.g. `gmd:MD_Metadata_Type` or `{uri}local`
    #[arg(long = "type", value_name = "QNAME")]
    pub type_name: Option<String>,

    /// With --type: also list the direct subtypes
    #[arg(long, requires = "type_name")]
    pub subtypes: bool,

    /// Also list global elements
    #[arg(long)]
    pub elements: bool,

    /// Print one line per namespace instead of the full listing
    #[arg(long, conflicts_with = "type_name")]
    pub summary: bool,

    #[arg(long, value_enum, default_value = "deny")]
    pub builtin_overwrite: BuiltinOverwriteAction,

    #[arg(long, value_enum, default_value = "yes")]
    pub register_builtins: RegisterBuiltins,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn subtypes_require_a_type() {
        assert!(Cli::try_parse_from(["md-inspect", "--subtypes"]).is_err());
        let cli = Cli::try_parse_from(["md-inspect", "--type", "gmd:MD_Metadata_Type", "--subtypes"])
            .unwrap();
        assert!(cli.subtypes);
        assert!(matches!(cli.builtin_overwrite, BuiltinOverwriteAction::Deny));
    }
}
