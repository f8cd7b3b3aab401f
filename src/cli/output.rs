use crate::data::CardData;
use crate::pipeline::OutputFormat;
use crate::render::Face;
use crate::template::Template;

use regex::Regex;
use std::path::PathBuf;

/// Builds output file names from a pattern such as `{player}-{template}-{face}`.
///
/// Known placeholders are `{player}`, `{team}`, `{year}`, `{template}` and
/// `{face}`; unknown ones expand to nothing.
pub struct OutputMap {
    pub prefix: PathBuf,
    pub pattern: String,
}

impl OutputMap {
    pub fn new(pattern: String) -> Self {
        Self {
            prefix: PathBuf::new(),
            pattern,
        }
    }

    pub fn set_prefix(&mut self, prefix: Option<PathBuf>) {
        if let Some(prefix) = prefix {
            self.prefix = prefix;
        }
    }

    pub fn identify(&self, template: &Template, card: &CardData, face: Face) -> String {
        let re = Regex::new(r"\{([^}]+)\}").unwrap();
        re.replace_all(self.pattern.as_str(), |captures: &regex::Captures| {
            match &captures[1] {
                "player" => slug(&card.player_name).unwrap_or_else(|| String::from("card")),
                "team" => slug(&card.team_name).unwrap_or_default(),
                "year" => card.year_label(),
                "template" => template.id.clone(),
                "face" => face.name().to_string(),
                _ => String::new(),
            }
        })
        .to_string()
    }

    pub fn path(
        &self,
        template: &Template,
        card: &CardData,
        face: Face,
        thumbnail: bool,
        format: OutputFormat,
    ) -> PathBuf {
        let mut name = self.identify(template, card, face);
        if thumbnail {
            name.push_str("-thumb");
        }
        let mut path = self.prefix.clone();
        path.push(name);
        path.set_extension(format.extension());
        path
    }
}

/// Lowercase, with runs of anything but letters and digits turned into `-`.
fn slug(s: &str) -> Option<String> {
    let re = Regex::new(r"[^\p{L}\p{N}]+").unwrap();
    let slug = re.replace_all(s.trim(), "-").trim_matches('-').to_lowercase();
    Some(slug).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::get_template_by_id;

    fn ruth() -> CardData {
        CardData {
            player_name: "Babe Ruth".into(),
            team_name: "New York Yankees".into(),
            year: Some(1927),
            ..Default::default()
        }
    }

    #[test]
    fn expands_placeholders() {
        let map = OutputMap::new(String::from("{player}-{template}-{face}"));
        let classic = get_template_by_id("classic");
        assert_eq!(map.identify(classic, &ruth(), Face::Front), "babe-ruth-classic-front");

        let map = OutputMap::new(String::from("{year}_{team}_{face}{nope}"));
        assert_eq!(map.identify(classic, &ruth(), Face::Back), "1927_new-york-yankees_back");
    }

    #[test]
    fn builds_paths() {
        let mut map = OutputMap::new(String::from("{player}-{face}"));
        map.set_prefix(Some(PathBuf::from("out")));
        let classic = get_template_by_id("classic");
        assert_eq!(
            map.path(classic, &ruth(), Face::Back, true, OutputFormat::Jpeg),
            PathBuf::from("out/babe-ruth-back-thumb.jpg")
        );
        assert_eq!(
            map.path(classic, &CardData::default(), Face::Front, false, OutputFormat::Png),
            PathBuf::from("out/card-front.png")
        );
    }
}
