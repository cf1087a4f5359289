use minutario::application::ports::AudioStore;
use minutario::infrastructure::storage::LocalAudioStore;

#[tokio::test]
async fn given_audio_bytes_when_storing_then_file_lands_under_the_base_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalAudioStore::new(dir.path().to_path_buf()).unwrap();

    let path = store.store("meeting.wav", b"fake audio").await.unwrap();

    assert!(path.starts_with(dir.path()));
    assert_eq!(std::fs::read(&path).unwrap(), b"fake audio");
}

#[tokio::test]
async fn given_missing_base_directory_when_constructing_then_it_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("uploads").join("audio");

    let store = LocalAudioStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    let path = store.store("a.mp3", b"x").await.unwrap();
    assert!(path.exists());
}
