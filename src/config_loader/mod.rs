mod geo_point_deserializer;
mod goal_window_deserializer;
