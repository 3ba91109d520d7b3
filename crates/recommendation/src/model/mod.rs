pub mod recommendation;
