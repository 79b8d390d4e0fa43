pub mod arena_vis2d;
