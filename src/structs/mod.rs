pub mod lobby;
