/// Health check endpoint for deployment probes
pub mod health;
