// Domain layer: core models and ports (interfaces), plus the derived view
// transforms and cart bookkeeping that consume a finished catalog.

pub mod cart;
pub mod model;
pub mod ports;
pub mod view;
