// Mock resume parsing: file-name heuristic and the canned upload profile.

pub mod handlers;
pub mod mock_parser;
