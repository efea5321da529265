mod convex_hull;
mod degenerate_input;
mod export;
mod hull_options;
mod random_clouds;
