use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info, warn};

use crate::{
    config::Config,
    exporter::Exporter,
    reference::CountryTable,
    related::related_variables,
    sample::{identifier::Sample, list::read_sample_list},
    template::Description,
};

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Report {
    pub created: Vec<PathBuf>,
    /// Samples that failed while `keep_going` was set.
    pub failed: Vec<(String, anyhow::Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Generator {
    config: Config,
    countries: CountryTable,
}

impl Generator {
    /// Load the country reference table named by `config`.
    pub fn new(config: Config) -> anyhow::Result<Generator> {
        let countries =
            CountryTable::load(&config.countries, &config.code_column, &config.name_column)?;
        Ok(Self::with_countries(config, countries))
    }

    pub fn with_countries(config: Config, countries: CountryTable) -> Generator {
        Generator { config, countries }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate a description for every sample in the configured sample list.
    pub fn run(&self) -> anyhow::Result<Report> {
        let samples = read_sample_list(&self.config.sample_list)?;
        self.generate_all(&samples)
    }

    pub fn generate_all(&self, samples: &[String]) -> anyhow::Result<Report> {
        let mut report = Report::default();
        for sample in samples {
            match self.generate(sample) {
                Ok(path) => report.created.push(path),
                Err(err) if self.config.keep_going => {
                    warn!("skipping {sample}: {err:#}");
                    report.failed.push((sample.clone(), err));
                }
                Err(err) => return Err(err.context(format!("generating {sample}"))),
            }
        }
        Ok(report)
    }

    /// Build the description of one sample and write it; returns the document path.
    pub fn generate(&self, raw: &str) -> anyhow::Result<PathBuf> {
        let (sample, description) = self.describe(raw)?;
        std::fs::create_dir_all(&self.config.output_dir)
            .with_context(|| format!("creating {}", self.config.output_dir.display()))?;
        let dest = self.config.output_dir.join(sample.document_name());
        write_description(&description, &dest)?;
        info!("created {}", dest.display());
        Ok(dest)
    }

    pub fn describe(&self, raw: &str) -> anyhow::Result<(Sample, Description)> {
        let sample = Sample::parse(raw)?;
        let country = self.countries.country_of(&sample)?;
        let related = related_variables(&self.config.geography_dir, &sample.code)?;
        debug!("{} -> {country}, related {related:?}", sample.id);
        let description = Description::new(&sample, country, related);
        Ok((sample, description))
    }
}

pub fn write_description(description: &Description, dest: &Path) -> anyhow::Result<()> {
    let mut exporter = Exporter::new();
    exporter.add_text(&description.render());
    exporter.save(dest)
}
