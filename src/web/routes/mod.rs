pub mod question_routes;
