pub mod json_snapshot_source;
pub mod jsonl_output_adapter;
