//! # u-tour
//!
//! Traveling salesman tour construction and improvement over an abstract
//! arc cost oracle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Cycle, Node bound, Point)
//! - [`cost`] — Cost oracle trait, dense distance matrix, sparse cost table
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor, Nearest/Farthest/Cheapest Insertion)
//! - [`local_search`] — Local search operators (2-opt)
//! - [`error`] — Error type shared by all operations
//!
//! ## Example
//!
//! ```
//! use u_tour::constructive::nearest_neighbor;
//! use u_tour::cost::DistanceMatrix;
//! use u_tour::local_search::two_opt;
//! use u_tour::models::Point;
//!
//! let dm = DistanceMatrix::from_points(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(2.0, 2.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(0.0, 2.0),
//!     Point::new(1.0, 3.0),
//! ]);
//! let (tour, cost) = nearest_neighbor(&dm.nodes(), &dm, &0).unwrap();
//! let (improved, improved_cost) = two_opt(&tour, &dm).unwrap();
//! assert!(improved.is_tour_of(&dm.nodes()));
//! assert!(improved_cost <= cost + 1e-10);
//! ```

pub mod constructive;
pub mod cost;
pub mod error;
pub mod local_search;
pub mod models;

pub use error::{Result, TourError};
