// Application layer: concrete pipelines wired from domain ports and core functions.

pub mod pipelines;
