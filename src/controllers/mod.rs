pub mod auth_controller;
pub mod fuel_controller;
pub mod machine_controller;
pub mod maintenance_controller;
pub mod operator_controller;
pub mod report_controller;
pub mod schedule_controller;
pub mod view_controller;
