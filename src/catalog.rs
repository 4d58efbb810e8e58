//! The project catalog: a fixed, ordered table of project records shared by
//! the landing grid and the detail view.

use std::{collections::HashSet, fmt, path::Path, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel stored in place of a repository URL when the source is not public.
pub const PRIVATE_SOURCE: &str = "Private";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate project id {0:?}")]
    DuplicateId(ProjectId),
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Project identifier. Serialized catalogs may carry numbers or strings; ids
/// are always compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct ProjectId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for ProjectId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => ProjectId(text),
            RawId::Number(number) => ProjectId(number.to_string()),
        }
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the source code of a project lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLink {
    Private,
    Public(String),
}

impl From<String> for SourceLink {
    fn from(value: String) -> Self {
        if value == PRIVATE_SOURCE {
            SourceLink::Private
        } else {
            SourceLink::Public(value)
        }
    }
}

impl From<SourceLink> for String {
    fn from(link: SourceLink) -> Self {
        match link {
            SourceLink::Private => PRIVATE_SOURCE.to_string(),
            SourceLink::Public(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectRecord {
    #[serde(rename = "id")]
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Live demo URL
    #[serde(default, rename = "Link", skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, rename = "Github", skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLink>,
    #[serde(rename = "Img")]
    pub image: String,
}

impl ProjectRecord {
    /// The demo URL, if one is actually configured. Empty strings and `#`
    /// placeholders count as missing.
    pub fn demo_url(&self) -> Option<&str> {
        self.demo
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != "#")
    }
}

/// Immutable, cheaply clonable, ordered project table.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    projects: Arc<[ProjectRecord]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids (detail lookup needs them unique).
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects().into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.projects)
    }

    /// Load a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {:?}", path))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("Failed to parse catalog {:?}", path))?;
        Ok(catalog)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id.as_str() == id)
    }

    /// The first `count` projects in catalog order (clamped to the length).
    pub fn prefix(&self, count: usize) -> &[ProjectRecord] {
        &self.projects[..count.min(self.projects.len())]
    }

    /// Records immediately before and after `id` in catalog order.
    pub fn neighbours(&self, id: &str) -> (Option<&ProjectRecord>, Option<&ProjectRecord>) {
        let Some(index) = self.projects.iter().position(|p| p.id.as_str() == id) else {
            return (None, None);
        };
        let previous = index.checked_sub(1).and_then(|i| self.projects.get(i));
        (previous, self.projects.get(index + 1))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: ProjectId::new("1"),
            title: "Portfolio personnel".into(),
            description: "Site vitrine responsive pour présenter mes projets et compétences."
                .into(),
            tech_stack: strings(&["HTML", "CSS", "Javascript"]),
            features: strings(&["Présentation de projets", "Design responsive"]),
            demo: Some("https://rabaasourour.github.io/portfolio/".into()),
            source: Some(SourceLink::Private),
            image: "assets/projects/portfolio.png".into(),
        },
        ProjectRecord {
            id: ProjectId::new("2"),
            title: "Zoo Arcadia".into(),
            description: "Site vitrine avec espace d’administration : gestion des utilisateurs, \
                          animaux, rapports vétérinaires et opérations quotidiennes."
                .into(),
            tech_stack: strings(&["PHP", "MySQL", "HTML", "CSS", "Bootstrap"]),
            features: strings(&[
                "Gestion utilisateurs",
                "Gestion animaux",
                "Rapports vétérinaires",
                "Opérations quotidiennes",
            ]),
            demo: Some("https://aljane.alwaysdata.net/home/show".into()),
            source: Some(SourceLink::Private),
            image: "assets/projects/zoo-arcadia.png".into(),
        },
        ProjectRecord {
            id: ProjectId::new("3"),
            title: "Osez Noël".into(),
            description: "Application web de type calendrier de l’Avent interactif avec \
                          surprises et personnalisation."
                .into(),
            tech_stack: strings(&["HTML", "CSS", "Javascript"]),
            features: strings(&["Calendrier interactif", "Surprises quotidiennes"]),
            demo: None,
            source: Some(SourceLink::Private),
            image: "assets/projects/osez-noel.png".into(),
        },
        ProjectRecord {
            id: ProjectId::new("4"),
            title: "Jeu de Mémoire".into(),
            description: "Jeu interactif où le joueur doit retrouver toutes les paires \
                          d’images. Expérience fluide et visuellement moderne."
                .into(),
            tech_stack: strings(&["HTML", "CSS", "Javascript", "ThreeJS", "UX/UI Design"]),
            features: strings(&[
                "Jeu interactif",
                "Effets visuels",
                "Responsive",
                "Animations fluides",
            ]),
            demo: Some("https://rabaasourour.github.io/jeu-de-memoir/".into()),
            source: Some(SourceLink::Public(
                "https://github.com/rabaasourour/jeu-de-memoir".into(),
            )),
            image: "assets/projects/jeu-memoire.png".into(),
        },
        ProjectRecord {
            id: ProjectId::new("5"),
            title: "Okaz".into(),
            description: "Plateforme d’achat et de vente en ligne avec gestion des annonces, \
                          catégories et utilisateurs."
                .into(),
            tech_stack: strings(&["PHP", "MySQL", "Bootstrap"]),
            features: strings(&["Gestion des annonces", "Catégories", "Comptes utilisateurs"]),
            demo: None,
            source: Some(SourceLink::Private),
            image: "assets/projects/okaz.png".into(),
        },
        ProjectRecord {
            id: ProjectId::new("6"),
            title: "Jeu de Quiz".into(),
            description: "Application de quiz avec niveaux de difficulté, scores et interface \
                          animée."
                .into(),
            tech_stack: strings(&["HTML", "CSS", "Javascript"]),
            features: strings(&["Niveaux de difficulté", "Scores", "Interface animée"]),
            demo: None,
            source: None,
            image: "assets/projects/quiz.png".into(),
        },
    ]
}
