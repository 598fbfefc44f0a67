mod http_vehicle_lookup;

pub use http_vehicle_lookup::HttpVehicleLookup;
