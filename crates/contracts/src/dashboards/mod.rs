pub mod d400_project_summary;
