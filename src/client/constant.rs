pub static SITE_NAME: &str = "PanelHub";
