use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GetLobbyListing {
    #[serde(rename = "Lobby", default)]
    pub lobbies: Vec<Lobby>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lobby {
    #[serde(rename = "AppId")]
    pub app_id: u16,
    #[serde(rename = "MaxPlayers")]
    pub max_players: u8,
    #[serde(rename = "PlayerCount")]
    pub player_count: u8,
    #[serde(rename = "PlayerListCurrent")]
    pub player_list_current: String,
    #[serde(rename = "GameLevel")]
    pub game_level: i32,
    #[serde(rename = "PlayerSkillLevel")]
    pub player_skill_level: u8,
    #[serde(rename = "GameName")]
    pub game_name: String,
    #[serde(rename = "RuleSet")]
    pub rule_set: u8,
    // GenericField1 on the wire, only the rename carries the meaning
    #[serde(rename(deserialize = "GenericField1", serialize = "WeaponsEnabled"))]
    pub weapons_enabled: bool,
    // kept as text on purpose, callers get the timestamp verbatim
    #[serde(rename = "GameCreateDt")]
    pub game_create_dt: String,
}
