mod panel;
mod pterodactyl;
