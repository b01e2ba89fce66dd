pub mod common;

pub mod a001_warehouse;
pub mod a002_vehicle;
pub mod a003_route;
pub mod a004_salesman;
pub mod a005_customer;
pub mod a006_order;
pub mod a007_delivery;
pub mod a008_invoice;
pub mod a009_survey;
pub mod a010_tier;
pub mod a011_workflow;
pub mod a012_planogram;
pub mod a013_service_visit;
