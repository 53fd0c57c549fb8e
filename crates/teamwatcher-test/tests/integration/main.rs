mod feeds;
mod health;
mod helpers;
