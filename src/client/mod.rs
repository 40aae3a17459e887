pub mod ipmi_sensors;
