use async_trait::async_trait;
use metals_analytics::assistant::{
    AnswerBackend, AnswerRequest, AssistantConfig, AssistantError, AssistantResult, ChatRole,
    ChatSession, DataContext, FAILURE_MESSAGE, WELCOME_MESSAGE,
};
use metals_analytics::data_ingestion::DataLoader;
use metals_analytics::domain_types::Metal;
use mockall::mock;

mock! {
    pub Backend {}

    #[async_trait]
    impl AnswerBackend for Backend {
        async fn generate(&self, request: &AnswerRequest) -> AssistantResult<String>;
    }
}

const GOLD_RAW: &str = "\"Date\",\"Value\"\n\"01/01/1915\",19.22\n\"01/02/1915\",19.25\n";
const SILVER_RAW: &str = "\"Date\",\"Value\"\n\"01/01/1915\",0.51\n";

fn context() -> DataContext {
    let loader = DataLoader::default();
    let datasets = vec![
        loader.load_text(Metal::Gold, GOLD_RAW),
        loader.load_text(Metal::Silver, SILVER_RAW),
    ];
    DataContext::from_datasets(&datasets)
}

#[test]
fn test_system_instruction_embeds_raw_text_verbatim() {
    let instruction = context().system_instruction(Metal::Gold);

    let gold_block = format!("--- GOLD DATA START ---\n{GOLD_RAW}--- GOLD DATA END ---");
    let silver_block = format!("--- SILVER DATA START ---\n{SILVER_RAW}--- SILVER DATA END ---");
    assert!(instruction.contains(&gold_block));
    assert!(instruction.contains(&silver_block));
    assert!(instruction.contains("**Gold**"));
}

#[tokio::test]
async fn test_conversation_carries_history_and_credentials() {
    let mut backend = MockBackend::new();
    backend
        .expect_generate()
        .withf(|req| {
            req.api_key == "test-key"
                && req.model == "custom-model"
                && req.contents.first().map(|t| t.text.as_str()) == Some(WELCOME_MESSAGE)
                && req.contents.last().map(|t| t.role) == Some(ChatRole::User)
        })
        .times(2)
        .returning(|req| Ok(format!("answer {}", req.contents.len())));

    let config = AssistantConfig::default()
        .with_api_key("test-key")
        .with_model("custom-model");
    let mut session = ChatSession::new(config, context(), backend);

    assert_eq!(session.send("first").await.map(|m| m.text.clone()), Some("answer 2".into()));
    assert_eq!(session.send("second").await.map(|m| m.text.clone()), Some("answer 4".into()));
    assert_eq!(session.messages().len(), 5);
}

#[tokio::test]
async fn test_every_failure_surfaces_the_same_message() {
    let mut backend = MockBackend::new();
    backend
        .expect_generate()
        .returning(|_| Err(AssistantError::Backend("quota exceeded".into())));

    let mut session = ChatSession::new(
        AssistantConfig::default().with_api_key("test-key"),
        context(),
        backend,
    );
    let reply = session.send("highest silver price?").await.unwrap();
    assert!(reply.is_error);
    assert_eq!(reply.text, FAILURE_MESSAGE);

    let mut session = ChatSession::new(AssistantConfig::default(), context(), MockBackend::new());
    let reply = session.send("highest silver price?").await.unwrap();
    assert!(reply.is_error);
    assert_eq!(reply.text, FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_blank_api_key_counts_as_missing() {
    let mut backend = MockBackend::new();
    backend.expect_generate().never();

    let config = AssistantConfig::default().with_api_key("  ");
    let mut session = ChatSession::new(config, context(), backend);
    let reply = session.send("trend?").await.unwrap();
    assert_eq!(reply.text, FAILURE_MESSAGE);
}
