//! Counter button component.

use yew::prelude::*;

use crate::counter::{Counter, CounterAction};

/// Button showing the click count. State starts at zero on every mount.
#[function_component(CounterButton)]
pub fn counter_button() -> Html {
    let counter = use_reducer(Counter::new);

    let onclick = {
        let counter = counter.clone();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Increment))
    };

    html! {
        <button type="button" class="btn btn-primary counter-button" {onclick}>
            { (*counter).to_string() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    /// Two independent buttons side by side.
    #[function_component(TwoButtons)]
    fn two_buttons() -> Html {
        html! {
            <>
                <CounterButton />
                <CounterButton />
            </>
        }
    }

    async fn render<C: BaseComponent<Properties = ()>>() -> String {
        ServerRenderer::<C>::new().hydratable(false).render().await
    }

    #[tokio::test]
    async fn test_mount_starts_at_zero() {
        let html = render::<CounterButton>().await;

        assert!(html.contains("<button"));
        assert!(html.contains("Count is 0"));
    }

    #[tokio::test]
    async fn test_every_mount_starts_fresh() {
        for _ in 0..3 {
            let html = render::<CounterButton>().await;
            assert_eq!(html.matches("Count is 0").count(), 1);
        }

        let html = render::<TwoButtons>().await;
        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches("Count is 0").count(), 2);
    }
}
