mod account;
mod lifetime;
mod matches;
mod mmr;
