use speculate2::speculate;
use todos_core::*;

fn names(lists: &TodoLists) -> Vec<&str> {
    lists.as_slice().iter().map(|list| list.name.as_str()).collect()
}

speculate! {
    before {
        let mut lists = TodoLists::new();
    }

    describe "lists" {
        describe "create_list" {
            it "appends an empty list and returns its index" {
                assert_eq!(lists.create_list("Work").expect("create failed"), 0);
                assert_eq!(lists.create_list("Home").expect("create failed"), 1);

                assert_eq!(names(&lists), vec!["Work", "Home"]);
                assert!(lists.get(0).unwrap().todos.is_empty());
            }

            it "rejects a duplicate name" {
                lists.create_list("Groceries").expect("create failed");

                let result = lists.create_list("Groceries");

                assert_eq!(result, Err(TodoError::InvalidName(NameError::Duplicate)));
                assert_eq!(lists.len(), 1);
            }

            it "rejects names outside 1 to 100 characters" {
                assert_eq!(
                    lists.create_list(""),
                    Err(TodoError::InvalidName(NameError::Length))
                );
                assert_eq!(
                    lists.create_list(&"n".repeat(101)),
                    Err(TodoError::InvalidName(NameError::Length))
                );
                assert!(lists.is_empty());
            }
        }

        describe "rename_list" {
            it "updates the name" {
                lists.create_list("Work").expect("create failed");

                lists.rename_list(0, "Office").expect("rename failed");

                assert_eq!(lists.get(0).unwrap().name, "Office");
            }

            it "allows keeping the current name" {
                lists.create_list("Groceries").expect("create failed");

                assert!(lists.rename_list(0, "Groceries").is_ok());
            }

            it "rejects another list's name" {
                lists.create_list("Work").expect("create failed");
                lists.create_list("Home").expect("create failed");

                let result = lists.rename_list(1, "Work");

                assert_eq!(result, Err(TodoError::InvalidName(NameError::Duplicate)));
                assert_eq!(lists.get(1).unwrap().name, "Home");
            }

            it "reports a missing list before validating the name" {
                assert_eq!(
                    lists.rename_list(3, ""),
                    Err(TodoError::IndexOutOfRange(Target::List))
                );
            }
        }

        describe "delete_list" {
            it "shifts later lists down" {
                lists.create_list("L0").expect("create failed");
                lists.create_list("L1").expect("create failed");
                lists.create_list("L2").expect("create failed");

                let removed = lists.delete_list(1).expect("delete failed");

                assert_eq!(removed.name, "L1");
                assert_eq!(names(&lists), vec!["L0", "L2"]);
                assert_eq!(lists.get(1).unwrap().name, "L2");
            }

            it "fails for an index past the end" {
                lists.create_list("Only").expect("create failed");

                assert_eq!(
                    lists.delete_list(1),
                    Err(TodoError::IndexOutOfRange(Target::List))
                );
                assert_eq!(lists.len(), 1);
            }
        }

        describe "sorted" {
            it "puts complete lists last and keeps original ids" {
                lists.create_list("Done").expect("create failed");
                lists.add_todo(0, "x").expect("add failed");
                lists.complete_all(0).expect("complete failed");
                lists.create_list("Empty").expect("create failed");

                let order: Vec<_> = lists
                    .sorted()
                    .into_iter()
                    .map(|(list, id)| (list.name.as_str(), id))
                    .collect();

                assert_eq!(order, vec![("Empty", 1), ("Done", 0)]);
            }
        }
    }

    describe "todos" {
        before {
            lists.create_list("Work").expect("create failed");
        }

        describe "add_todo" {
            it "appends an incomplete todo" {
                let index = lists.add_todo(0, "Email boss").expect("add failed");

                assert_eq!(index, 0);
                assert_eq!(
                    lists.get(0).unwrap().todos,
                    vec![Todo { name: "Email boss".to_string(), completed: false }]
                );
            }

            it "accepts a single character" {
                assert!(lists.add_todo(0, "x").is_ok());
            }

            it "rejects 101 characters" {
                assert_eq!(lists.add_todo(0, &"x".repeat(101)), Err(TodoError::InvalidTodo));
                assert!(lists.get(0).unwrap().todos.is_empty());
            }

            it "fails for a missing list" {
                assert_eq!(
                    lists.add_todo(5, "x"),
                    Err(TodoError::IndexOutOfRange(Target::List))
                );
            }
        }

        describe "delete_todo" {
            it "removes the todo and shifts the rest" {
                lists.add_todo(0, "a").expect("add failed");
                lists.add_todo(0, "b").expect("add failed");

                let removed = lists.delete_todo(0, 0).expect("delete failed");

                assert_eq!(removed.name, "a");
                assert_eq!(lists.get(0).unwrap().todos[0].name, "b");
            }

            it "fails for a missing todo" {
                assert_eq!(
                    lists.delete_todo(0, 0),
                    Err(TodoError::IndexOutOfRange(Target::Todo))
                );
            }
        }

        describe "set_completed" {
            it "sets and clears the flag" {
                lists.add_todo(0, "a").expect("add failed");

                lists.set_completed(0, 0, true).expect("update failed");
                assert!(lists.get(0).unwrap().todos[0].completed);

                lists.set_completed(0, 0, false).expect("update failed");
                assert!(!lists.get(0).unwrap().todos[0].completed);
            }

            it "fails for a missing todo" {
                assert_eq!(
                    lists.set_completed(0, 2, true),
                    Err(TodoError::IndexOutOfRange(Target::Todo))
                );
            }
        }

        describe "complete_all" {
            it "completes every todo and marks the list complete" {
                lists.add_todo(0, "a").expect("add failed");
                lists.add_todo(0, "b").expect("add failed");
                lists.add_todo(0, "c").expect("add failed");

                lists.complete_all(0).expect("complete failed");

                let list = lists.get(0).unwrap();
                assert!(list.todos.iter().all(|todo| todo.completed));
                assert!(list.is_complete());
                assert_eq!(list.remaining_count(), 0);
            }

            it "leaves an empty list incomplete" {
                lists.complete_all(0).expect("complete failed");

                assert!(!lists.get(0).unwrap().is_complete());
            }
        }

        describe "list completion" {
            it "is incomplete while any todo is open" {
                lists.add_todo(0, "a").expect("add failed");
                lists.add_todo(0, "b").expect("add failed");
                lists.set_completed(0, 0, true).expect("update failed");

                let list = lists.get(0).unwrap();
                assert!(!list.is_complete());
                assert_eq!(list.todos_count(), 2);
                assert_eq!(list.remaining_count(), 1);
            }
        }
    }
}
