//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `buildings` owns the static location file, `portal` talks to the campus
//! open-classroom feed, and `proximity` + `schedule` reshape that feed.
//! `availability` composes them into the `/result` pipeline so handlers only
//! translate errors into status codes.

pub mod availability;
pub mod buildings;
pub mod portal;
pub mod proximity;
pub mod schedule;
