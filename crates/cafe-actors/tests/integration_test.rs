use async_trait::async_trait;
use cafe_actors::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Voucher {
    id: u32,
    code: String,
    percent_off: u8,
    redeemed: bool,
}

#[derive(Debug)]
struct VoucherCreate {
    code: String,
    percent_off: u8,
}

#[derive(Debug)]
struct VoucherUpdate {
    percent_off: Option<u8>,
}

#[derive(Debug)]
enum VoucherAction {
    Redeem,
}

#[derive(Debug)]
struct VoucherFilter {
    redeemed: Option<bool>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum VoucherError {
    #[error("discount of {0}% is out of range")]
    OutOfRange(u8),
    #[error("voucher {0} already redeemed")]
    AlreadyRedeemed(String),
}

#[async_trait]
impl ActorEntity for Voucher {
    type Id = u32;
    type Create = VoucherCreate;
    type Update = VoucherUpdate;
    type Action = VoucherAction;
    type ActionResult = u8;
    type Filter = VoucherFilter;
    type Context = ();
    type Error = VoucherError;

    fn from_create_params(id: u32, params: VoucherCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            code: params.code,
            percent_off: params.percent_off,
            redeemed: false,
        })
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        if self.percent_off == 0 || self.percent_off > 100 {
            return Err(VoucherError::OutOfRange(self.percent_off));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: VoucherUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(percent_off) = update.percent_off {
            self.percent_off = percent_off;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: VoucherAction, _ctx: &()) -> Result<u8, Self::Error> {
        match action {
            VoucherAction::Redeem if self.redeemed => {
                Err(VoucherError::AlreadyRedeemed(self.code.clone()))
            }
            VoucherAction::Redeem => {
                self.redeemed = true;
                Ok(self.percent_off)
            }
        }
    }

    fn matches(&self, filter: &VoucherFilter) -> bool {
        filter.redeemed.map_or(true, |redeemed| redeemed == self.redeemed)
    }

    fn same_slot(&self, other: &Self) -> bool {
        self.code == other.code
    }

    async fn absorb(&mut self, incoming: Self, _ctx: &()) -> Result<(), Self::Error> {
        if self.redeemed {
            return Err(VoucherError::AlreadyRedeemed(self.code.clone()));
        }
        self.percent_off = incoming.percent_off;
        Ok(())
    }
}

fn voucher(code: &str, percent_off: u8) -> VoucherCreate {
    VoucherCreate {
        code: code.into(),
        percent_off,
    }
}

// --- Tests ---

#[tokio::test]
async fn full_lifecycle() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id = client.create(voucher("WELCOME10", 10)).await.unwrap();
    assert_eq!(id, 1);

    let off = client.perform_action(id, VoucherAction::Redeem).await.unwrap();
    assert_eq!(off, 10);
    assert!(client.get(id).await.unwrap().unwrap().redeemed);

    let again = client.perform_action(id, VoucherAction::Redeem).await;
    let err = again.unwrap_err().into_entity_error::<VoucherError>().unwrap();
    assert_eq!(err, VoucherError::AlreadyRedeemed("WELCOME10".into()));

    let updated = client
        .update(id, VoucherUpdate { percent_off: Some(15) })
        .await
        .unwrap();
    assert_eq!(updated.percent_off, 15);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn list_filters_in_creation_order() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    tokio::spawn(actor.run(()));

    for (code, off) in [("A", 5), ("B", 10), ("C", 20)] {
        client.create(voucher(code, off)).await.unwrap();
    }
    client.perform_action(2, VoucherAction::Redeem).await.unwrap();

    let all = client.list(VoucherFilter { redeemed: None }).await.unwrap();
    let codes: Vec<_> = all.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, ["A", "B", "C"]);

    let open = client
        .list(VoucherFilter {
            redeemed: Some(false),
        })
        .await
        .unwrap();
    let codes: Vec<_> = open.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, ["A", "C"]);
}

#[tokio::test]
async fn failed_on_create_stores_nothing() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(voucher("BROKEN", 0)).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<VoucherError>().unwrap(),
        VoucherError::OutOfRange(0)
    );
    assert!(client
        .list(VoucherFilter { redeemed: None })
        .await
        .unwrap()
        .is_empty());

    // ids are not reused after a rejected create
    assert_eq!(client.create(voucher("OK", 5)).await.unwrap(), 2);
}

#[tokio::test]
async fn concurrent_creates_for_one_code_share_a_record() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    tokio::spawn(actor.run(()));
    let other = client.clone();

    let (a, b) = tokio::join!(
        client.create(voucher("SPRING", 10)),
        other.create(voucher("SPRING", 25)),
    );
    assert_eq!(a.unwrap(), b.unwrap());

    let all = client.list(VoucherFilter { redeemed: None }).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].percent_off == 10 || all[0].percent_off == 25);

    // absorb can refuse; the stored record is left alone
    client.perform_action(all[0].id, VoucherAction::Redeem).await.unwrap();
    let err = client.create(voucher("SPRING", 50)).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<VoucherError>().unwrap(),
        VoucherError::AlreadyRedeemed("SPRING".into())
    );
    let stored = client.get(all[0].id).await.unwrap().unwrap();
    assert!(stored.redeemed);
    assert_ne!(stored.percent_off, 50);
}

#[tokio::test]
async fn missing_records_report_not_found() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.perform_action(42, VoucherAction::Redeem).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));

    let err = client.delete(42).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}

#[tokio::test]
async fn closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Voucher>::new(10);
    drop(actor);

    let err = client.create(voucher("LATE", 5)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
