pub mod carousel;
pub mod footer;
pub mod header;
pub mod lead_form;
pub mod main;
pub mod project_tabs;
pub mod sticky_cta;
pub mod testimonials;
pub mod toast;
