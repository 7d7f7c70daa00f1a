mod cli;

use std::error::Error;

use clap::Parser;
use md_model::{SchemaDump, SchemaSet, TypeReport};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let set = md_catalogs::build_standard(cli.builtin_overwrite.into(), cli.register_builtins.into())?;

    if let Some(source) = &cli.type_name {
        let name = set.parse_name(source)?;
        debug!(%name, "describing type");
        let type_ = set
            .lookup_ref(&name)
            .ok_or_else(|| format!("no type named {name}"))?;
        let report = TypeReport::new(&set, type_);
        if cli.subtypes {
            print!("{}", report.with_subtypes());
        } else {
            print!("{report}");
        }
        return Ok(());
    }

    let namespace = cli
        .namespace
        .as_deref()
        .map(|ns| resolve_namespace(&set, ns))
        .transpose()?;

    if cli.summary {
        for registry in set.registries() {
            if namespace.is_some_and(|ns| ns != registry.namespace()) {
                continue;
            }
            println!(
                "{} {} types={} elements={} depends on [{}]",
                registry.prefix(),
                registry.namespace(),
                registry.len(),
                registry.elements().count(),
                registry.dependencies().join(", ")
            );
        }
        return Ok(());
    }

    let mut dump = SchemaDump::new(&set);
    if let Some(namespace) = namespace {
        dump = dump.namespace(namespace);
    }
    if cli.elements {
        dump = dump.with_elements();
    }
    print!("{dump}");
    Ok(())
}

/// Accepts either a registered prefix or a namespace URI.
fn resolve_namespace<'a>(set: &'a SchemaSet, source: &'a str) -> Result<&'a str, String> {
    if let Some(namespace) = set.namespace_for_prefix(source) {
        return Ok(namespace);
    }
    match set.registry(source) {
        Some(registry) => Ok(registry.namespace()),
        None => Err(format!("unknown namespace {source:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_catalogs::GMD_NAMESPACE;
    use md_model::{BuiltinOverwriteAction, RegisterBuiltins};

    #[test]
    fn namespaces_resolve_by_prefix_or_uri() {
        let set = md_catalogs::build_standard(BuiltinOverwriteAction::Deny, RegisterBuiltins::Yes)
            .unwrap();
        assert_eq!(resolve_namespace(&set, "gmd").unwrap(), GMD_NAMESPACE);
        assert_eq!(resolve_namespace(&set, GMD_NAMESPACE).unwrap(), GMD_NAMESPACE);
        assert!(resolve_namespace(&set, "nope").is_err());
    }
}
