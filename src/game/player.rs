use std::fmt;

use crate::config::PlayerConfig;

/// 1-based player identity, stable for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    pub const fn new(id: usize) -> Self {
        PlayerId(id)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    color: String,
    display_name: Option<String>,
    score: u32,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get player name for display, falling back to "Player N"
    pub fn name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => format!("Player {}", self.id),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Ordered participants. Turn order follows registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    /// Build the registry with zeroed scores. Ids are assigned by position.
    pub fn from_config(entries: &[PlayerConfig]) -> Self {
        let players = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Player {
                id: PlayerId(i + 1),
                color: entry.color.clone(),
                display_name: entry.name.clone(),
                score: 0,
            })
            .collect();
        PlayerRegistry { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        id.0.checked_sub(1).and_then(|i| self.players.get(i))
    }

    pub fn by_index(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub(crate) fn award_point(&mut self, id: PlayerId) {
        if let Some(player) = id.0.checked_sub(1).and_then(|i| self.players.get_mut(i)) {
            player.score += 1;
        }
    }
}
