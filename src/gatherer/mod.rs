pub mod lobby_listing;
