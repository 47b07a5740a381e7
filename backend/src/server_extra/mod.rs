pub mod products_route;
