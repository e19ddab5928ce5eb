use sporlauth::config::{env_path, load_env};

#[tokio::test]
async fn test_load_env_leaves_data_dir_untouched() {
    let dir = env_path().parent().map(|p| p.to_path_buf()).unwrap();
    let existed = dir.exists();

    load_env().await.unwrap();

    assert_eq!(dir.exists(), existed);
}
