
// Paginated book search: transport client, fetch-loop orchestration,
// result accumulation and project grouping
pub mod search;
