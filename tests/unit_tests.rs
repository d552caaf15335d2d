//! End-to-end library tests over the decode → group → score/filter → write
//! pipeline, using small in-memory annotation streams.

use circscore::config::Config;
use circscore::output::write_groups;
use circscore::parser::{parse_records, ScoreTable};
use circscore::pipeline::{build_groups, filter_groups, inject_scores, signature};
use circscore::types::{Field, Group};
use circscore::Error;

// -------------------------------------------------------------------------
// Helper functions
// -------------------------------------------------------------------------

fn groups_from(lines: &[&str]) -> Vec<Group> {
    let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    let records = parse_records(content.as_bytes()).unwrap();
    build_groups(records, &Config::default()).unwrap()
}

fn render(groups: &[Group]) -> String {
    let mut output = Vec::new();
    write_groups(&mut output, groups).unwrap();
    String::from_utf8(output).unwrap()
}

const SCENARIO_ONE: [&str; 3] = [
    "1\tX\tcircRNA\t10\t50\t.\t+\t.\tid=1",
    "1\tX\texon\t10\t20\t.\t+\t.\tid=1a",
    "1\tX\texon\t40\t50\t.\t+\t.\tid=1b",
];

// -------------------------------------------------------------------------
// Grouping and signatures
// -------------------------------------------------------------------------

mod test_grouping {
    use super::*;

    #[test]
    fn test_one_circrna_two_exons() {
        let groups = groups_from(&SCENARIO_ONE);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].parent.start, Field::Integer(10));
        assert_eq!(groups[0].parent.end, Field::Integer(50));
        assert_eq!(groups[0].children.len(), 2);
        assert_eq!(signature(&groups[0]).unwrap(), "1:9|50|9|20|39|50|");
    }

    #[test]
    fn test_single_parent_serializes_to_one_line() {
        let line = "chr7\tX\tcircRNA\t500\t900\t.\t+\t.\tid=7";
        let groups = groups_from(&[line]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].children.is_empty());
        assert_eq!(render(&groups), format!("{}\n", line));
    }

    #[test]
    fn test_record_count_is_preserved() {
        let lines = [
            "1\tX\tcircRNA\t10\t50\t.\t+\t.\tid=1",
            "1\tX\texon\t10\t20\t.\t+\t.\tid=1a",
            "1\tX\tcircRNA\t60\t90\t.\t+\t.\tid=2",
            "1\tX\tgene\t60\t90\t.\t+\t.\tid=g",
            "1\tX\texon\t60\t70\t.\t+\t.\tid=ga",
            "1\tX\texon\t80\t90\t.\t+\t.\tid=gb",
        ];
        let groups = groups_from(&lines);
        let total: usize = groups.iter().map(|g| 1 + g.children.len()).sum();
        assert_eq!(total, lines.len());
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let lines = [
            "chr1\tCIRCexplorer\tcircRNA\t1000\t5000\t12\t+\t.\tgene_id \"G1\"; cov \"3\";",
            "chr1\tCIRCexplorer\texon\t1000\t1200\t.\t+\t0\tgene_id \"G1\";",
            "chr1\tCIRCexplorer\texon\t4800\t5000\t.\t+\t2\tgene_id \"G1\";",
            "chr1\tCIRCexplorer\tcircRNA\t7000\t7100\t0.5\t-\t.\tgene_id \"G2\";",
        ];
        let expected: String = lines.iter().map(|l| format!("{}\n", l)).collect();
        assert_eq!(render(&groups_from(&lines)), expected);
    }

    #[test]
    fn test_leading_child_is_malformed() {
        let records = parse_records("1\tX\texon\t10\t20\t.\t+\t.\tid=1a\n".as_bytes()).unwrap();
        let err = build_groups(records, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::OrphanChild { line: 1, .. }));
        assert!(err.to_string().starts_with("grouping:"));
    }
}

// -------------------------------------------------------------------------
// Score injection
// -------------------------------------------------------------------------

mod test_inject {
    use super::*;

    fn table(content: &str) -> ScoreTable {
        ScoreTable::from_reader(content.as_bytes(), &Config::default()).unwrap()
    }

    #[test]
    fn test_score_reaches_parent_and_children() {
        let mut groups = groups_from(&SCENARIO_ONE);
        inject_scores(&mut groups, &table("circRNA_id,score\n1:9|50|9|20|39|50|,0.92\n")).unwrap();

        assert_eq!(groups[0].parent.score, Field::Float(0.92));
        assert_eq!(groups[0].children[0].score, Field::Float(0.92));
        assert_eq!(groups[0].children[1].score, Field::Float(0.92));
        assert_eq!(
            render(&groups),
            "1\tX\tcircRNA\t10\t50\t0.92\t+\t.\tid=1\n\
             1\tX\texon\t10\t20\t0.92\t+\t.\tid=1a\n\
             1\tX\texon\t40\t50\t0.92\t+\t.\tid=1b\n"
        );
    }

    #[test]
    fn test_every_child_matches_parent_after_join() {
        let mut groups = groups_from(&[
            "1\tX\tcircRNA\t10\t50\t.\t+\t.\tid=1",
            "1\tX\texon\t10\t20\t4\t+\t.\tid=1a",
            "2\tX\tcircRNA\t30\t80\t.\t+\t.\tid=2",
            "2\tX\texon\t30\t40\t.\t+\t.\tid=2a",
            "2\tX\texon\t50\t60\t.\t+\t.\tid=2b",
            "2\tX\texon\t70\t80\t.\t+\t.\tid=2c",
        ]);
        let scores = table("circRNA_id,score\n1:9|50|9|20|,0.1\n2:29|80|29|40|49|60|69|80|,1\n");
        inject_scores(&mut groups, &scores).unwrap();

        for group in &groups {
            for child in &group.children {
                assert_eq!(child.score, group.parent.score);
            }
        }
        assert!(render(&groups).contains("\t1.0\t"));
    }

    #[test]
    fn test_small_and_large_scores_use_exponent_form() {
        let mut groups = groups_from(&[
            "1\tX\tcircRNA\t10\t50\t.\t+\t.\tid=1",
            "1\tX\texon\t10\t20\t.\t+\t.\tid=1a",
            "2\tX\tcircRNA\t30\t80\t.\t+\t.\tid=2",
        ]);
        let scores = table("circRNA_id,score\n1:9|50|9|20|,1e-05\n2:29|80|,1e16\n");
        inject_scores(&mut groups, &scores).unwrap();

        assert_eq!(
            render(&groups),
            "1\tX\tcircRNA\t10\t50\t1e-05\t+\t.\tid=1\n\
             1\tX\texon\t10\t20\t1e-05\t+\t.\tid=1a\n\
             2\tX\tcircRNA\t30\t80\t1e+16\t+\t.\tid=2\n"
        );
    }

    #[test]
    fn test_missing_signature_names_the_key() {
        let mut groups = groups_from(&SCENARIO_ONE);
        let err = inject_scores(&mut groups, &table("circRNA_id,score\n1:9|50|,0.92\n")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "score join: signature `1:9|50|9|20|39|50|` not found in score table"
        );
    }
}

// -------------------------------------------------------------------------
// Threshold filtering
// -------------------------------------------------------------------------

mod test_filter {
    use super::*;

    fn scored_groups() -> Vec<Group> {
        groups_from(&[
            "1\tX\tcircRNA\t10\t50\t0.92\t+\t.\tid=1",
            "1\tX\texon\t10\t20\t.\t+\t.\tid=1a",
            "1\tX\texon\t40\t50\t.\t+\t.\tid=1b",
            "2\tX\tcircRNA\t100\t300\t0.3\t-\t.\tid=2",
            "2\tX\texon\t100\t300\t.\t-\t.\tid=2a",
        ])
    }

    #[test]
    fn test_keeps_only_high_scoring_group() {
        let kept = filter_groups(scored_groups(), 0.5).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].parent.attribute, Field::Text("id=1".to_string()));
        assert_eq!(
            render(&kept),
            "1\tX\tcircRNA\t10\t50\t0.92\t+\t.\tid=1\n\
             1\tX\texon\t10\t20\t.\t+\t.\tid=1a\n\
             1\tX\texon\t40\t50\t.\t+\t.\tid=1b\n"
        );
    }

    #[test]
    fn test_higher_threshold_keeps_subset() {
        for (low, high) in [(0.0, 0.3), (0.3, 0.5), (0.5, 0.92), (0.92, 1.0)] {
            let low_ids: Vec<_> = filter_groups(scored_groups(), low)
                .unwrap()
                .into_iter()
                .map(|g| g.parent.line)
                .collect();
            let high_ids: Vec<_> = filter_groups(scored_groups(), high)
                .unwrap()
                .into_iter()
                .map(|g| g.parent.line)
                .collect();
            assert!(high_ids.iter().all(|id| low_ids.contains(id)));
        }
    }

    #[test]
    fn test_filter_after_inject() {
        let mut groups = groups_from(&SCENARIO_ONE);
        let table: ScoreTable = vec![("1:9|50|9|20|39|50|".to_string(), 0.92)]
            .into_iter()
            .collect();
        inject_scores(&mut groups, &table).unwrap();

        assert_eq!(filter_groups(groups.clone(), 0.9).unwrap().len(), 1);
        assert!(filter_groups(groups, 0.92).unwrap().is_empty());
    }
}
