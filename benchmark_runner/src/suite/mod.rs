//!
//! The benchmark suite catalog.
//!

pub mod definition;

use benchmark_report::Category;
use benchmark_report::Scale;
use serde_json::json;

use self::definition::Definition;

///
/// Builds the full catalog for one scale tier, in presentation order:
/// query-performance benchmarks first, capability gaps second.
///
pub fn catalog(scale: Scale) -> Vec<Definition> {
    let mut definitions = query_benchmarks(scale);
    definitions.extend(capability_benchmarks(scale));
    definitions
}

///
/// The query-performance benchmarks: both systems can compete.
///
pub fn query_benchmarks(scale: Scale) -> Vec<Definition> {
    let database = scale.dataset_name();
    let events_index = format!("{database}_medical_events");

    vec![
        Definition {
            key: "simple_aggregation",
            name: "Simple Aggregation",
            category: Category::Query,
            description: "COUNT and AVG cost grouped by department",
            sql: format!(
                "SELECT department, COUNT(*) AS event_count, AVG(cost_usd) AS avg_cost \
                 FROM {database}.medical_events \
                 GROUP BY department \
                 ORDER BY event_count DESC"
            ),
            dsl: Some(json!({
                "size": 0,
                "aggs": {
                    "by_department": {
                        "terms": { "field": "department", "size": 20, "order": { "_count": "desc" } },
                        "aggs": {
                            "avg_cost": { "avg": { "field": "cost_usd" } }
                        }
                    }
                }
            })),
            es_index: Some(events_index.clone()),
            es_limitation: None,
            concurrent: false,
        },
        Definition {
            key: "time_series",
            name: "Time-Series Analysis",
            category: Category::Query,
            description: "Daily revenue aggregation with date bucketing, last 30 days",
            sql: format!(
                "SELECT toDate(timestamp) AS date, COUNT(*) AS event_count, SUM(cost_usd) AS daily_revenue \
                 FROM {database}.medical_events \
                 GROUP BY date \
                 ORDER BY date DESC \
                 LIMIT 30"
            ),
            dsl: Some(json!({
                "size": 0,
                "aggs": {
                    "by_date": {
                        "date_histogram": {
                            "field": "timestamp",
                            "calendar_interval": "day",
                            "order": { "_key": "desc" }
                        },
                        "aggs": {
                            "daily_revenue": { "sum": { "field": "cost_usd" } }
                        }
                    }
                }
            })),
            es_index: Some(events_index.clone()),
            es_limitation: None,
            concurrent: false,
        },
        Definition {
            key: "fulltext_search",
            name: "Full-Text Search",
            category: Category::Query,
            description: "Search for Surgery or Emergency events: inverted index vs LIKE scan",
            sql: format!(
                "SELECT event_type, COUNT(*) AS match_count \
                 FROM {database}.medical_events \
                 WHERE event_type LIKE '%Surgery%' OR event_type LIKE '%Emergency%' \
                 GROUP BY event_type \
                 ORDER BY match_count DESC"
            ),
            dsl: Some(json!({
                "size": 0,
                "query": {
                    "bool": {
                        "should": [
                            { "match": { "event_type": "Surgery" } },
                            { "match": { "event_type": "Emergency" } }
                        ]
                    }
                },
                "aggs": {
                    "by_event_type": {
                        "terms": { "field": "event_type", "size": 20 }
                    }
                }
            })),
            es_index: Some(events_index.clone()),
            es_limitation: None,
            concurrent: false,
        },
        Definition {
            key: "top_n",
            name: "Top-N Query",
            category: Category::Query,
            description: "Find the 10 highest-cost events",
            sql: format!(
                "SELECT event_id, patient_id, department, cost_usd \
                 FROM {database}.medical_events \
                 ORDER BY cost_usd DESC \
                 LIMIT 10"
            ),
            dsl: Some(json!({
                "size": 10,
                "sort": [ { "cost_usd": "desc" } ],
                "_source": [ "event_id", "patient_id", "department", "cost_usd" ]
            })),
            es_index: Some(events_index.clone()),
            es_limitation: None,
            concurrent: false,
        },
        Definition {
            key: "multi_metric",
            name: "Multi-Metric Dashboard",
            category: Category::Query,
            description: "Department dashboard with six metrics in one pass",
            sql: format!(
                "SELECT department, COUNT(*) AS total_events, \
                 COUNT(DISTINCT patient_id) AS unique_patients, \
                 SUM(cost_usd) AS total_revenue, AVG(cost_usd) AS avg_cost, \
                 AVG(duration_minutes) AS avg_duration, \
                 SUM(CASE WHEN severity = 'Critical' THEN 1 ELSE 0 END) AS critical_cases \
                 FROM {database}.medical_events \
                 GROUP BY department \
                 ORDER BY total_revenue DESC"
            ),
            dsl: Some(json!({
                "size": 0,
                "aggs": {
                    "by_department": {
                        "terms": { "field": "department", "size": 20, "order": { "total_revenue": "desc" } },
                        "aggs": {
                            "unique_patients": { "cardinality": { "field": "patient_id" } },
                            "total_revenue": { "sum": { "field": "cost_usd" } },
                            "avg_cost": { "avg": { "field": "cost_usd" } },
                            "avg_duration": { "avg": { "field": "duration_minutes" } },
                            "critical_cases": { "filter": { "term": { "severity": "Critical" } } }
                        }
                    }
                }
            })),
            es_index: Some(events_index.clone()),
            es_limitation: None,
            concurrent: false,
        },
        Definition {
            key: "concurrent_load",
            name: "Concurrent Load",
            category: Category::Query,
            description: "The simple aggregation issued as 5 simultaneous queries",
            sql: format!(
                "SELECT department, COUNT(*) AS event_count, AVG(cost_usd) AS avg_cost \
                 FROM {database}.medical_events \
                 GROUP BY department"
            ),
            dsl: Some(json!({
                "size": 0,
                "aggs": {
                    "by_department": {
                        "terms": { "field": "department", "size": 100 },
                        "aggs": {
                            "avg_cost": { "avg": { "field": "cost_usd" } }
                        }
                    }
                }
            })),
            es_index: Some(events_index),
            es_limitation: None,
            concurrent: true,
        },
    ]
}

///
/// The capability benchmarks: operations Elasticsearch cannot execute.
///
pub fn capability_benchmarks(scale: Scale) -> Vec<Definition> {
    let database = scale.dataset_name();

    vec![
        Definition {
            key: "patient_event_join",
            name: "Patient-Event JOIN",
            category: Category::Capability,
            description: "Join patients with their medical events by condition and insurance",
            sql: format!(
                "SELECT p.primary_condition, p.insurance_type, COUNT(*) AS event_count, \
                 AVG(e.cost_usd) AS avg_cost, SUM(e.cost_usd) AS total_cost \
                 FROM {database}.patients p \
                 JOIN {database}.medical_events e ON p.patient_id = e.patient_id \
                 GROUP BY p.primary_condition, p.insurance_type \
                 ORDER BY total_cost DESC \
                 LIMIT 20"
            ),
            dsl: None,
            es_index: None,
            es_limitation: Some(
                "Elasticsearch cannot perform JOINs. Applications must denormalize data \
                 or run multiple queries and join in application code.",
            ),
            concurrent: false,
        },
        Definition {
            key: "cost_by_condition",
            name: "Cost by Condition",
            category: Category::Capability,
            description: "Total healthcare cost per patient condition, requires a JOIN",
            sql: format!(
                "SELECT p.primary_condition, COUNT(DISTINCT p.patient_id) AS patient_count, \
                 COUNT(*) AS event_count, SUM(e.cost_usd) AS total_cost, \
                 AVG(e.cost_usd) AS avg_cost_per_event \
                 FROM {database}.patients p \
                 JOIN {database}.medical_events e ON p.patient_id = e.patient_id \
                 GROUP BY p.primary_condition \
                 ORDER BY total_cost DESC"
            ),
            dsl: None,
            es_index: None,
            es_limitation: Some(
                "Elasticsearch cannot join patient conditions with event costs.",
            ),
            concurrent: false,
        },
        Definition {
            key: "anomaly_detection",
            name: "Anomaly Detection",
            category: Category::Capability,
            description: "Find events with cost above the average, requires a subquery",
            sql: format!(
                "SELECT department, severity, COUNT(*) AS high_cost_events, \
                 AVG(cost_usd) AS avg_high_cost \
                 FROM {database}.medical_events \
                 WHERE cost_usd > (SELECT AVG(cost_usd) FROM {database}.medical_events) \
                 GROUP BY department, severity \
                 ORDER BY high_cost_events DESC"
            ),
            dsl: None,
            es_index: None,
            es_limitation: Some(
                "Elasticsearch cannot execute subqueries. Finding above-average events \
                 takes two round trips: one for the average, one with that value inlined.",
            ),
            concurrent: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use benchmark_report::Category;
    use benchmark_report::Scale;

    #[test]
    fn keys_are_unique() {
        let catalog = super::catalog(Scale::M10);
        let keys: HashSet<&str> = catalog.iter().map(|definition| definition.key).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn capability_benchmarks_have_no_dsl() {
        for definition in super::catalog(Scale::M1) {
            match definition.category {
                Category::Capability => {
                    assert!(!definition.is_possible_on_elasticsearch());
                    assert!(definition.es_limitation.is_some());
                    assert!(definition.es_index.is_none());
                }
                Category::Query => {
                    assert!(definition.is_possible_on_elasticsearch());
                    assert!(definition.es_index.is_some());
                }
            }
        }
    }

    #[test]
    fn only_the_concurrent_benchmark_is_concurrent() {
        let concurrent: Vec<&'static str> = super::catalog(Scale::M100)
            .into_iter()
            .filter(|definition| definition.concurrent)
            .map(|definition| definition.key)
            .collect();
        assert_eq!(concurrent, vec!["concurrent_load"]);
    }

    #[test]
    fn sql_is_namespaced_by_scale() {
        for definition in super::catalog(Scale::M100) {
            assert!(definition.sql.contains("healthcare_100m."));
        }
    }
}
