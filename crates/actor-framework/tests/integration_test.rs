use actor_framework::{ActorEntity, FrameworkError, IdSequence, ResourceActor, ResourceClient};
use async_trait::async_trait;
use std::collections::HashSet;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleTask {
    id: u64,
    name: String,
    done: bool,
}

#[derive(Debug)]
struct SimpleTaskCreate {
    name: String,
}

#[derive(Debug)]
enum TaskAction {
    Complete,
}

#[derive(Debug, thiserror::Error)]
enum SimpleTaskError {
    #[error("Task name must not be empty")]
    EmptyName,
    #[error("Task {0} is already done")]
    AlreadyDone(u64),
}

#[async_trait]
impl ActorEntity for SimpleTask {
    type Id = u64;
    type Create = SimpleTaskCreate;
    type Filter = bool;
    type Action = TaskAction;
    type ActionResult = SimpleTask;
    type Context = ();
    type Error = SimpleTaskError;

    fn from_create_params(id: u64, params: SimpleTaskCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(SimpleTaskError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            done: false,
        })
    }

    fn matches(&self, done: &bool) -> bool {
        self.done == *done
    }

    async fn handle_action(
        &mut self,
        action: TaskAction,
        _ctx: &Self::Context,
    ) -> Result<SimpleTask, Self::Error> {
        match action {
            TaskAction::Complete => {
                if self.done {
                    return Err(SimpleTaskError::AlreadyDone(self.id));
                }
                self.done = true;
                Ok(self.clone())
            }
        }
    }
}

fn start() -> ResourceClient<SimpleTask> {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    client
}

async fn create(client: &ResourceClient<SimpleTask>, name: &str) -> SimpleTask {
    client
        .create(SimpleTaskCreate {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

fn names(tasks: &[SimpleTask]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = start();

    // 1. Create: ids start at 1 and grow
    let wash = create(&client, "wash").await;
    let dry = create(&client, "dry").await;
    let fold = create(&client, "fold").await;
    assert_eq!((wash.id, dry.id, fold.id), (1, 2, 3));

    // 2. Get
    let fetched = client.get(dry.id).await.unwrap().unwrap();
    assert_eq!(fetched, dry);
    assert!(client.get(99).await.unwrap().is_none());

    // 3. Action, then the same action again is rejected
    let completed = client.perform_action(dry.id, TaskAction::Complete).await.unwrap();
    assert!(completed.done);
    let again = client.perform_action(dry.id, TaskAction::Complete).await;
    assert!(matches!(again, Err(FrameworkError::EntityError(_))));
    assert!(client.get(dry.id).await.unwrap().unwrap().done);

    // 4. Find
    let open = client.find(false).await.unwrap();
    assert_eq!(names(&open), vec!["wash", "fold"]);

    // 5. Delete keeps the order of the rest
    client.delete(wash.id).await.unwrap();
    let remaining = client.list().await.unwrap();
    assert_eq!(names(&remaining), vec!["dry", "fold"]);

    // 6. Ids are not reused after a delete
    let iron = create(&client, "iron").await;
    assert_eq!(iron.id, 4);
    assert_eq!(names(&client.list().await.unwrap()), vec!["dry", "fold", "iron"]);
}

#[tokio::test]
async fn test_delete_unknown_id_reports_not_found() {
    let client = start();
    create(&client, "wash").await;

    let result = client.delete(42).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "42"));
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_action_on_unknown_id_reports_not_found() {
    let client = start();
    let result = client.perform_action(5, TaskAction::Complete).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(id)) if id == "5"));
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_an_id() {
    let client = start();

    let rejected = client
        .create(SimpleTaskCreate {
            name: String::new(),
        })
        .await;
    match rejected {
        Err(FrameworkError::EntityError(inner)) => {
            let inner = inner.downcast::<SimpleTaskError>().unwrap();
            assert!(matches!(*inner, SimpleTaskError::EmptyName));
        }
        other => panic!("expected entity error, got {other:?}"),
    }

    let first = create(&client, "wash").await;
    assert_eq!(first.id, 1);
}

#[tokio::test]
async fn test_exhausted_sequence_rejects_create() {
    let (actor, client) =
        ResourceActor::<SimpleTask>::with_sequence(4, IdSequence::starting_after(u64::MAX));
    tokio::spawn(actor.run(()));

    let result = client
        .create(SimpleTaskCreate {
            name: "wash".to_string(),
        })
        .await;
    assert!(matches!(result, Err(FrameworkError::IdSpaceExhausted)));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_request_to_stopped_actor_reports_closed() {
    let (actor, client) = ResourceActor::<SimpleTask>::new(4);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let client = start();

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .create(SimpleTaskCreate {
                        name: format!("task-{i}"),
                    })
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let task = handle.await.unwrap().unwrap();
        assert!(ids.insert(task.id), "duplicate id {}", task.id);
    }

    assert_eq!(ids.len(), 50);
    let listed = client.list().await.unwrap();
    assert_eq!(listed.len(), 50);
    assert!(listed.windows(2).all(|pair| pair[0].id < pair[1].id));
}
