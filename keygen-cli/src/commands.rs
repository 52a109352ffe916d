use std::error::Error;
use std::io::Write;

use keygen_core::site::{meta_description, page_title, render_sitemap, sitemap, title_to_slug};
use keygen_core::{
    Catalog, EntropyPolicy, EntropySource, GenerationOptions, GeneratorDescriptor, InsecureEntropy, OptionValue,
    Producer, SecureEntropy,
};

use crate::cli::Command;

/// Executes one command against `catalog`, writing results to `out`.
pub fn dispatch<W: Write>(command: &Command, catalog: Catalog, out: &mut W) -> Result<(), Box<dyn Error>> {
    match command {
        Command::List => list(&catalog, out),
        Command::Show { id } => show(&catalog, id, out),
        Command::Generate { id, length, count, insecure_seed } => {
            let id = id.clone().unwrap_or_else(|| catalog.primary().id().to_owned());
            let options = length.map(GenerationOptions::with_length);
            match insecure_seed {
                Some(seed) => {
                    let producer =
                        Producer::new(catalog, InsecureEntropy::seeded(*seed)).with_policy(EntropyPolicy::AllowWeak);
                    generate(&producer, &id, options.as_ref(), *count, out)
                }
                None => {
                    let producer = Producer::new(catalog, SecureEntropy::new());
                    generate(&producer, &id, options.as_ref(), *count, out)
                }
            }
        }
        Command::Path { id } => {
            let path = catalog.path_for(id).ok_or_else(|| not_found(id))?;
            writeln!(out, "{path}")?;
            Ok(())
        }
        Command::Sitemap { base_url } => {
            write!(out, "{}", render_sitemap(&sitemap(base_url, &catalog)))?;
            Ok(())
        }
    }
}

fn not_found(id: &str) -> Box<dyn Error> {
    format!("generator not found: {id}").into()
}

fn list<W: Write>(catalog: &Catalog, out: &mut W) -> Result<(), Box<dyn Error>> {
    let width = catalog.list().iter().map(|g| g.id().len()).max().unwrap_or(0);
    for generator in catalog.list() {
        writeln!(out, "{:width$}  {}", generator.id(), generator.title)?;
    }
    Ok(())
}

fn show<W: Write>(catalog: &Catalog, id: &str, out: &mut W) -> Result<(), Box<dyn Error>> {
    let generator: &GeneratorDescriptor = catalog.get(id).ok_or_else(|| not_found(id))?;
    writeln!(out, "id:          {}", generator.id())?;
    writeln!(out, "title:       {}", generator.title)?;
    writeln!(out, "description: {}", generator.description)?;
    writeln!(out, "path:        {}", generator.path())?;
    writeln!(out, "slug:        {}", title_to_slug(&generator.title))?;
    writeln!(out, "page title:  {}", page_title(&generator.title))?;
    writeln!(out, "meta:        {}", meta_description(&generator.title, &generator.description))?;
    match &generator.default_options {
        Some(defaults) => {
            for (name, value) in defaults.iter() {
                let value = match value {
                    OptionValue::Number(n) => n.to_string(),
                    OptionValue::Float(f) => f.to_string(),
                    OptionValue::Flag(b) => b.to_string(),
                    OptionValue::Text(s) => s.clone(),
                };
                writeln!(out, "default:     {name} = {value}")?;
            }
        }
        None => writeln!(out, "options:     none")?,
    }
    Ok(())
}

fn generate<E: EntropySource, W: Write>(
    producer: &Producer<E>,
    id: &str,
    options: Option<&GenerationOptions>,
    count: usize,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let values = producer.generate_many(id, options, count)?;
    if let Some(warning) = values.first().and_then(|v| v.warning()) {
        log::warn!("{warning}");
    }
    for value in values {
        writeln!(out, "{}", value.value())?;
    }
    Ok(())
}
