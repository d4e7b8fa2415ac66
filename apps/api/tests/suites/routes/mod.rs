mod errors;
mod planets;
