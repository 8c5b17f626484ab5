use super::*;
use std::cell::RefCell;
use std::rc::Rc;

#[tokio::test]
async fn empty_pipeline_is_identity() {
    let out = Pipeline::<u32, u32>::new().run(7).await.unwrap();
    assert_eq!(out, 7);
}

#[tokio::test]
async fn steps_run_in_order_with_typed_outputs() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b) = (Rc::clone(&log), Rc::clone(&log));

    let pipeline = Pipeline::new()
        .then("parse", move |raw: &'static str| async move {
            a.borrow_mut().push("parse");
            raw.parse::<u32>().map_err(|e| ApiError::Rejected(e.to_string()))
        })
        .then("describe", move |n: u32| async move {
            b.borrow_mut().push("describe");
            Ok(format!("lecture-{n}"))
        });

    assert_eq!(pipeline.steps(), ["parse", "describe"]);
    assert_eq!(pipeline.run("12").await.unwrap(), "lecture-12");
    assert_eq!(*log.borrow(), vec!["parse", "describe"]);
}

#[tokio::test]
async fn failure_stops_chain_and_names_step() {
    let ran_second = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&ran_second);

    let err = Pipeline::new()
        .then("resolve", |_: ()| async { Err::<String, _>(ApiError::NotFound { detail: "no lecture".to_owned() }) })
        .then("appeal", move |_id: String| async move {
            *flag.borrow_mut() = true;
            Ok(())
        })
        .run(())
        .await
        .unwrap_err();

    assert_eq!(err.step, "resolve");
    assert!(err.source.is_not_found());
    assert!(!*ran_second.borrow());
}
