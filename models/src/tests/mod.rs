mod alert_feed;
mod region_code;
