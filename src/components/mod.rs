pub mod app;
pub mod characters_view;
pub mod home_view;
pub mod location_card;
pub mod locations_view;
pub mod sighting_form;
pub mod sighting_pin;
pub mod sightings_view;
