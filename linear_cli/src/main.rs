use crate::flags::LinearCmd;
use collection_traits::EndAccess;
use linear::{DoublyLinkedList, DynamicArray, SinglyLinkedList};
use std::fmt::Debug;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

mod flags;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        );

    tracing::subscriber::set_global_default(subscriber)?;

    let flags = flags::Linear::from_env()?;
    match flags.subcommand {
        LinearCmd::Singly(cmd) => {
            let mut list = SinglyLinkedList::<u32>::new();
            for value in cmd.values {
                list.add_last(value);
            }
            println!("{list:?}");

            let drained = drain_from_back(&mut list)?;
            info!(count = drained.len(), "drained singly linked list");
            println!("{drained:?}");
        }
        LinearCmd::Doubly(cmd) => {
            let mut list = DoublyLinkedList::<u32>::new();
            for value in cmd.values {
                list.add_last(value);
            }

            if let Some(index) = cmd.remove_at {
                let removed = list.remove_at(index)?;
                info!(index, ?removed, "removed node");
            }
            println!("{list:?}");
        }
        LinearCmd::Array(cmd) => {
            let mut array = match cmd.capacity {
                Some(capacity) => DynamicArray::<u32>::with_capacity(capacity)?,
                None => DynamicArray::new(),
            };

            for value in cmd.values {
                let capacity = array.capacity();
                array.append(value);
                if array.capacity() != capacity {
                    info!(from = capacity, to = array.capacity(), "reallocated");
                }
            }

            println!(
                "{array:?} (size {}, capacity {})",
                array.len(),
                array.capacity()
            );
        }
    }

    Ok(())
}

/// Removes elements from the back until the list is empty, returning them in
/// removal order.
fn drain_from_back<L>(list: &mut L) -> anyhow::Result<Vec<Option<L::Item>>>
where
    L: EndAccess,
    L::Error: std::error::Error + Send + Sync + 'static,
    L::Item: Debug,
{
    let mut drained = Vec::with_capacity(list.len());
    while !list.is_empty() {
        let item = list.remove_last()?;
        tracing::debug!(?item, remaining = list.len(), "removed last");
        drained.push(item);
    }
    Ok(drained)
}
