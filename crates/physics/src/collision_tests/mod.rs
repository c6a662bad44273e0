mod aabb_aabb;

pub(crate) use aabb_aabb::*;
