mod alerts_client;
mod config;
mod controller;
mod helpers;
