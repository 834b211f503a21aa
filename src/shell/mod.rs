// Composition root for the veterinarians context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory veterinarian directory.
// - Wire it into the registration handler and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
