//! Card input files.

use crate::data::{CardData, FeaturedStats};
use crate::error::{Error, Result};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Photo pan offset, in card units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

/// One card to render: its data, the template to use and the featured stats.
///
/// ```toml
/// template = "donruss1985"
/// featured = ["avg", "hr"]
///
/// [card]
/// player-name = "Babe Ruth"
/// player-image = "ruth.jpg"
///
/// [card.stats]
/// avg = ".342"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardFile {
    pub template: Option<String>,
    pub featured: FeaturedStats,
    pub card: CardData,
    pub photo: Option<Pan>,
}

impl CardFile {
    /// Reads a card file. Relative image paths are resolved against the file's folder.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::open_card(path, e))?;
        let mut file: Self = toml::from_str(&content).map_err(|e| Error::open_card(path, e))?;
        if let Some(folder) = path.parent() {
            file.resolve(folder);
        }
        Ok(file)
    }

    fn resolve(&mut self, folder: &Path) {
        for image in [&mut self.card.player_image, &mut self.card.team_logo]
            .into_iter()
            .flatten()
        {
            if !image.is_empty() && Path::new(image.as_str()).is_relative() {
                *image = folder.join(image.as_str()).display().to_string();
            }
        }
    }

    pub fn pan(&self) -> Option<(f64, f64)> {
        self.photo.map(|p| (p.x, p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StatKey;

    #[test]
    fn reads_card_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ruth.toml");
        fs::write(
            &path,
            r#"
            template = "classic"
            featured = ["avg", "hr"]

            [card]
            player-name = "Babe Ruth"
            team-name = "Yankees"
            year = 1927
            player-image = "photos/ruth.png"
            team-logo = "/logos/nyy.png"

            [card.stats]
            avg = ".356"
            hr = "60"

            [photo]
            x = 10.0
            y = -4.0
            "#,
        )
        .unwrap();

        let file = CardFile::open(&path).unwrap();
        assert_eq!(file.template.as_deref(), Some("classic"));
        assert_eq!(file.featured.as_slice(), &[StatKey::Avg, StatKey::Hr]);
        assert_eq!(file.card.player_name, "Babe Ruth");
        assert_eq!(file.card.stat(StatKey::Hr), Some("60"));
        assert_eq!(
            file.card.photo(),
            Some(dir.path().join("photos/ruth.png").display().to_string().as_str())
        );
        assert_eq!(file.card.logo(), Some("/logos/nyy.png"));
        assert_eq!(file.pan(), Some((10.0, -4.0)));
    }

    #[test]
    fn rejects_too_many_featured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.toml");
        fs::write(&path, "featured = [\"avg\", \"hits\", \"runs\", \"rbi\"]\n").unwrap();
        assert!(matches!(CardFile::open(&path), Err(Error::FailedOpenCard(..))));
    }
}
