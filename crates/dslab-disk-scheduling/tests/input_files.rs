use std::path::PathBuf;

use dslab_disk_scheduling::comparison::Comparison;
use dslab_disk_scheduling::input::{InputError, SimulationConfig};
use dslab_disk_scheduling::{Direction, Policy};

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dslab-disk-scheduling-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn key_value_file_runs_all_policies() {
    let path = write_input(
        "input_data.txt",
        "Initial Position = 53\nRequests = 98,183,37,122,14,124,65,67\n",
    );
    let config = SimulationConfig::load(&path).unwrap();
    let runs = Comparison::from_config(&config).unwrap().run().unwrap();
    std::fs::remove_file(&path).unwrap();

    let totals: Vec<_> = runs.iter().map(|run| (run.policy, run.total_movement())).collect();
    assert_eq!(
        totals,
        vec![
            (Policy::Fcfs, 640),
            (Policy::Sstf, 236),
            (Policy::Scan, 331),
            (Policy::CScan, 382),
            (Policy::Look, 299),
            (Policy::CLook, 322),
        ]
    );
}

#[test]
fn yaml_file_selects_policies_and_direction() {
    let path = write_input(
        "input.yaml",
        "initial_position: 53\nrequests: [98, 183, 37, 122, 14, 124, 65, 67]\ndirection: down\npolicies: [SCAN, LOOK]\n",
    );
    let config = SimulationConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.direction, Direction::Down);

    let runs = Comparison::from_config(&config).unwrap().run_parallel(2).unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].policy, Policy::Scan);
    assert_eq!(runs[0].trace.visited(), &[53, 37, 14, 0, 65, 67, 98, 122, 124, 183]);
    assert_eq!(runs[0].total_movement(), 236);
    assert_eq!(runs[1].policy, Policy::Look);
    assert_eq!(runs[1].total_movement(), 208);
}

#[test]
fn malformed_yaml_names_the_file() {
    let path = write_input("broken.yml", "initial_position: [not, a, number]\n");
    let err = SimulationConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, InputError::Yaml { .. }));
    assert!(err.to_string().contains("broken.yml"));
}
