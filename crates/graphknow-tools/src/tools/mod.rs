pub mod graph_search;
