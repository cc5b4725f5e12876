use super::room::Room;
use crate::suspects::SuspectIndex;
use crate::HASH_BUCKETS;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;

/// Everything a session needs before play starts:
/// the mansion entrance and the fully populated suspect index.
#[derive(Debug)]
pub struct Scenario {
    title: String,
    entrance: Room,
    suspects: SuspectIndex,
}

impl Scenario {
    pub fn new(title: &str, entrance: Room, suspects: SuspectIndex) -> Self {
        Self {
            title: title.to_string(),
            entrance,
            suspects,
        }
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn entrance(&self) -> &Room {
        &self.entrance
    }
    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    /// Read a JSON scenario from disk.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read scenario {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parse scenario {}", path.display()))
    }
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Blueprint>(json)?.try_into()
    }

    /// The classic mansion.
    ///
    /// ```text
    ///                 hall
    ///               /      \
    ///            estar    biblioteca
    ///           /   \     /      \
    ///       cozinha jogos jardim  escritorio
    ///       /   \
    ///    adega quarto
    ///             \
    ///            banheiro
    /// ```
    pub fn classic() -> Self {
        let cozinha = Room::new("Cozinha", "Copo quebrado")
            .with_left(Room::new("Adega", "Garrafa com resíduos"))
            .with_right(
                Room::new("Quarto", "Cabelo loiro").with_right(Room::new("Banheiro", "Pó branco")),
            );
        let estar = Room::new("Sala de Estar", "Vidro com impressão")
            .with_left(cozinha)
            .with_right(Room::bare("Sala de Jogos"));
        let biblioteca = Room::new("Biblioteca", "Carta rasgada")
            .with_left(Room::new("Jardim", "Luvas sujas"))
            .with_right(Room::new("Escritório", "Documento suspeito"));
        let hall = Room::new("Hall de Entrada", "Pegada de sapato")
            .with_left(estar)
            .with_right(biblioteca);
        let suspects = [
            ("Pegada de sapato", "Sr. Silva"),
            ("Vidro com impressão", "Sra. Pereira"),
            ("Carta rasgada", "Dr. Ramos"),
            ("Copo quebrado", "Sra. Pereira"),
            ("Luvas sujas", "Sr. Costa"),
            ("Documento suspeito", "Dr. Ramos"),
            ("Garrafa com resíduos", "Sr. Costa"),
            ("Cabelo loiro", "Sra. Rodrigues"),
            ("Pó branco", "Sra. Rodrigues"),
        ]
        .into_iter()
        .collect::<SuspectIndex>();
        Self::new("Detective Quest", hall, suspects)
    }
}

/// On-disk form of a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blueprint {
    pub title: String,
    pub mansion: Plan,
    #[serde(default)]
    pub suspects: Vec<Association>,
    #[serde(default)]
    pub buckets: Option<usize>,
}

/// On-disk form of a room and the rooms below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Plan>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Plan>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Association {
    pub clue: String,
    pub suspect: String,
}

impl TryFrom<Blueprint> for Scenario {
    type Error = anyhow::Error;
    fn try_from(blueprint: Blueprint) -> Result<Self, Self::Error> {
        let buckets = blueprint.buckets.unwrap_or(HASH_BUCKETS);
        anyhow::ensure!(buckets > 0, "bucket count must be positive");
        let entrance = Room::try_from(blueprint.mansion)?;
        let mut suspects = SuspectIndex::with_buckets(buckets);
        for Association { clue, suspect } in blueprint.suspects {
            suspects.put(&clue, &suspect);
        }
        log::debug!(
            "loaded scenario {:?} ({} rooms, {} clues)",
            blueprint.title,
            entrance.count(),
            suspects.len()
        );
        Ok(Self::new(&blueprint.title, entrance, suspects))
    }
}

impl TryFrom<Plan> for Room {
    type Error = anyhow::Error;
    fn try_from(plan: Plan) -> Result<Self, Self::Error> {
        anyhow::ensure!(!plan.name.trim().is_empty(), "room without a name");
        let clue = plan.clue.unwrap_or_default();
        let mut room = Room::new(&plan.name, &clue);
        if let Some(left) = plan.left {
            room = room.with_left(Room::try_from(*left).with_context(|| plan.name.clone())?);
        }
        if let Some(right) = plan.right {
            room = room.with_right(Room::try_from(*right).with_context(|| plan.name.clone())?);
        }
        Ok(room)
    }
}
