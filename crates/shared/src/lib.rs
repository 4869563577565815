//! Records and wire types shared by the directory client, renderer and site.

pub mod domain;
pub mod protocol;
