use crate::sample::{
    identifier::Sample,
    symbol::{CRVAR_CLOSE, CRVAR_OPEN, SOURCE_PREFIX, VARIABLE_PREFIX},
};

/// Fields substituted into a geography variable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub sample_name: String,
    pub country: String,
    pub year: String,
    /// Multi-year variables already defined for the country.
    pub related: Vec<String>,
}

impl Description {
    pub fn new(sample: &Sample, country: &str, related: Vec<String>) -> Description {
        Description {
            sample_name: sample.name.clone(),
            country: country.to_owned(),
            year: sample.year.clone(),
            related,
        }
    }

    pub fn has_multiple_years(&self) -> bool {
        !self.related.is_empty()
    }

    /// Render the `<vardesc>` block. The multi-year form adds one paragraph naming the
    /// related variables; otherwise both forms are identical.
    pub fn render(&self) -> String {
        let var = format!("{}{}", VARIABLE_PREFIX, self.sample_name);
        let source = format!("{}{}", SOURCE_PREFIX, self.sample_name);
        let country = &self.country;
        let year = &self.year;

        let mut desc = vec![format!(
            "{var} ({source}) indicates the region of {country} where the respondent was interviewed. \
             DHS regions in the {year} {country} survey are equivalent to regions."
        )];
        if let Some(sentence) = related_sentence(&self.related) {
            desc.push(format!(
                "Other samples have their own sample-specific geography variables. \
                 There are other integrated variables that provide spatially consistent regions over time. \
                 These include {sentence}"
            ));
        }
        desc.push(format!(
            "A GIS map for {var} (in shapefile format) can be downloaded from the DHS program \
             <link id=\"24\">Spatial Data Repository</link> Boundaries page."
        ));

        let comp = [
            format!("{var} ({source}) is a country- and sample-specific variable and has no comparability issues."),
            "<em>Comparability - Standard DHS</em>".to_owned(),
            format!(
                "{var}, like other V101 variables, is a geographic variable added during processing of the DHS data. \
                 V101 is included in all Phases of the DHS."
            ),
        ];

        [
            "<vardesc>".to_owned(),
            section("var", &var),
            section("desc", &desc.join("\n\n")),
            section("comp", &comp.join("\n\n")),
            "<comment>\n</comment>".to_owned(),
            "</vardesc>".to_owned(),
        ]
        .join("\n\n")
    }
}

fn section(tag: &str, body: &str) -> String {
    format!("<{tag}>\n{body}\n</{tag}>")
}

fn highlight(name: &str) -> String {
    format!("{CRVAR_OPEN}{name}{CRVAR_CLOSE}")
}

/// Join related variables into a sentence ending in a period, each one highlighted.
pub fn related_sentence(names: &[String]) -> Option<String> {
    let marked = names.iter().map(|name| highlight(name)).collect::<Vec<_>>();
    match marked.as_slice() {
        [] => None,
        [only] => Some(format!("{only}.")),
        [first, second] => Some(format!("{first} and {second}.")),
        [init @ .., last] => Some(format!("{}, and {last}.", init.join(", "))),
    }
}
