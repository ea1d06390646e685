/// Color for statuses missing from the color table.
pub const DEFAULT_STATUS_COLOR: &str = "#CCCCCC";

pub const STATUS_COLORS_QUERY: &str =
    "SELECT site_status__c, status_color__c FROM site_status_configuration__c";

pub const ACTIVE_STATUS_COLORS_QUERY: &str = "SELECT name__v, site_status__c, status_color__c FROM site_status_configuration__c WHERE status__v = 'ACTIVE'";
